//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #ffffff;
  --secondary: #f1f5f9;
  --border: #e2e8f0;
  --glass: rgba(255, 255, 255, 0.7);

  /* TEXT */
  --foreground: #0f172a;
  --muted: #64748b;

  /* ACCENT */
  --primary: #1e293b;
  --primary-foreground: #f8fafc;

  /* SEMANTIC */
  --success: #16a34a;
  --danger: #dc2626;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms cubic-bezier(0.16, 1, 0.3, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

.block { display: block; }
.w-full { width: 100%; }
.muted { color: var(--muted); }

/* === Page Scroll Container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Reveal Animation === */
.reveal-animation {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal-animation.active {
  opacity: 1;
  transform: translateY(0);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.animate-fade-in { animation: fade-in 1s ease both; }
.animate-bounce { animation: bounce 1.2s infinite; }
.animate-pulse { animation: pulse 1.5s infinite; }

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  padding: 1rem 0;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.site-header--scrolled {
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 500;
}

.desktop-nav {
  display: flex;
  gap: 2rem;
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: rgba(15, 23, 42, 0.8);
  transition: color var(--transition-fast);
}

.nav-link:hover { color: var(--foreground); }

.link-hover {
  background-image: linear-gradient(currentColor, currentColor);
  background-size: 0% 1px;
  background-position: 0 100%;
  background-repeat: no-repeat;
  transition: background-size var(--transition-normal);
}

.link-hover:hover { background-size: 100% 1px; }

.menu-toggle {
  display: none;
  background: none;
  border: none;
  font-size: 1.25rem;
  padding: 0.5rem;
  cursor: pointer;
}

.mobile-nav {
  position: fixed;
  inset: 4rem 0 0 0;
  background: var(--background);
  transform: translateX(100%);
  transition: transform var(--transition-normal);
  z-index: 40;
}

.mobile-nav--open { transform: translateX(0); }

.mobile-nav-links {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  height: 100%;
}

.mobile-nav-link { font-size: 1.25rem; font-weight: 500; }

@media (max-width: 768px) {
  .desktop-nav { display: none; }
  .menu-toggle { display: block; }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
}

.hero-gradient {
  background: radial-gradient(circle at 50% 30%, var(--secondary), var(--background) 70%);
}

.hero-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.hero-badge {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  margin-bottom: 1.5rem;
  font-size: 0.75rem;
  font-weight: 500;
  background: var(--secondary);
  border-radius: 9999px;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 6vw, 4.5rem);
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: 1.5rem;
}

.hero-subtitle {
  max-width: 42rem;
  font-size: 1.125rem;
  color: var(--muted);
  margin-bottom: 2.5rem;
}

.scroll-hint {
  position: absolute;
  bottom: 3rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  color: var(--muted);
  animation-delay: 1.2s;
}

/* === Sections === */
.section { padding: 6rem 0; }
.section--tinted { background: rgba(241, 245, 249, 0.3); }

.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.section-subtitle { color: var(--muted); }

.glass-card {
  background: var(--glass);
  backdrop-filter: blur(8px);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  box-shadow: 0 4px 24px rgba(15, 23, 42, 0.04);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.card-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 500;
  margin-bottom: 1.5rem;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 3rem;
  align-items: center;
}

.about-lead {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 500;
  margin-bottom: 1rem;
}

.about-copy { display: grid; gap: 1rem; color: var(--muted); }
.about-cta { margin-top: 2rem; }

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
  gap: 1.5rem;
}

.stat-card {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.stat-icon { font-size: 1.5rem; margin-bottom: 1rem; }
.stat-value { font-size: 1.875rem; font-weight: 700; }
.stat-label { font-size: 0.875rem; color: var(--muted); }

/* === Projects === */
.project-card {
  overflow: hidden;
  transition: opacity var(--transition-reveal), transform var(--transition-reveal), box-shadow var(--transition-normal);
}

.project-card.active:hover {
  transform: translateY(-8px);
  box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
}

.project-image { height: 12rem; overflow: hidden; }

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms ease;
}

.project-card:hover .project-image img { transform: scale(1.1); }

.project-body { padding: 1.5rem; }

.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 0.75rem; }

.tag {
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
  background: var(--secondary);
  border-radius: 9999px;
}

.project-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.project-description { font-size: 0.875rem; color: var(--muted); margin-bottom: 1rem; }
.project-links { display: flex; gap: 0.75rem; }
.project-link { font-size: 0.875rem; transition: color var(--transition-fast); }
.project-link:hover { color: var(--primary); }

/* === Skills === */
.skill-card { padding: 1.5rem; }

.skill-category {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 500;
  text-align: center;
  margin-bottom: 1.5rem;
}

.skill-list { display: grid; gap: 1rem; }

.skill-row {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
  font-size: 0.875rem;
}

.skill-name { font-weight: 500; }
.skill-level { color: var(--muted); }

.skill-track {
  height: 0.5rem;
  background: var(--secondary);
  border-radius: 9999px;
  overflow: hidden;
}

.skill-bar {
  height: 100%;
  background: var(--primary);
  transform: scaleX(0);
  transform-origin: left;
  transition: transform 1s ease-out;
}

.skill-card.active .skill-bar { transform: scaleX(1); }

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 3rem;
}

.contact-card { padding: 2rem; margin-bottom: 2rem; }

.contact-form { display: grid; gap: 1.25rem; }

.form-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.form-input {
  width: 100%;
  padding: 0.5rem 1rem;
  font: inherit;
  color: inherit;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 1px var(--primary);
}

.form-input:disabled { opacity: 0.6; cursor: not-allowed; }
.form-textarea { resize: none; }

.contact-info { display: grid; gap: 1.5rem; }
.contact-info-row { display: flex; align-items: center; gap: 1rem; }
.contact-info-title { font-size: 0.875rem; font-weight: 500; }

.icon-badge {
  height: 2.5rem;
  width: 2.5rem;
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: rgba(30, 41, 59, 0.1);
  font-size: 0.875rem;
  font-weight: 600;
}

.icon-badge--link { transition: background var(--transition-fast); }
.icon-badge--link:hover { background: rgba(30, 41, 59, 0.2); }

.social-links { display: flex; gap: 1rem; margin-top: 1.5rem; }

/* === Buttons === */
.btn-primary, .btn-pill {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font: inherit;
  font-weight: 500;
  color: var(--primary-foreground);
  background: var(--primary);
  border: none;
  cursor: pointer;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal), opacity var(--transition-fast);
}

.btn-primary { padding: 0.75rem 1.5rem; border-radius: 0.5rem; }
.btn-pill { padding: 0.75rem 2rem; border-radius: 9999px; }

.btn-primary.is-disabled { opacity: 0.7; cursor: not-allowed; }

.btn-hover:hover:not(:disabled) {
  box-shadow: 0 10px 20px rgba(15, 23, 42, 0.15);
  transform: translateY(-2px);
}

.btn-icon {
  height: 2.5rem;
  width: 2.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--primary);
  color: var(--primary-foreground);
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.btn-icon:hover { transform: translateY(-4px); box-shadow: 0 6px 12px rgba(15, 23, 42, 0.15); }

/* === Footer === */
.site-footer { padding: 3rem 0; background: var(--secondary); }

.footer-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 1.5rem;
}

.footer-brand h3 {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.divider { height: 1px; width: 6rem; background: var(--border); }
.copyright { font-size: 0.875rem; }

/* === Toasts === */
.toast-viewport {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  list-style: none;
  max-width: 380px;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  padding: 1rem 1.25rem;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 30px rgba(15, 23, 42, 0.12);
  animation: fade-in 200ms ease both;
}

.toast-success { border-left: 4px solid #16a34a; }
.toast-failure { border-left: 4px solid #dc2626; }

.toast-title { font-weight: 600; font-size: 0.875rem; }
.toast-description { font-size: 0.875rem; color: var(--muted); }

.toast-close {
  margin-left: auto;
  background: none;
  border: none;
  font-size: 1rem;
  color: var(--muted);
  cursor: pointer;
}
"#;
