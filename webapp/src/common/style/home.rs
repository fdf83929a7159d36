pub const HOME_STYLES: &str = r#"
/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  border-bottom: 1px solid transparent;
  transition: background-color 300ms ease, border-color 300ms ease, box-shadow 300ms ease;
}

.navbar[data-scrolled="true"] {
  background-color: rgba(15, 15, 15, 0.85);
  backdrop-filter: blur(12px);
  border-bottom-color: var(--color-border);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

.navbar-inner {
  max-width: 1100px;
  height: 72px;
  margin: 0 auto;
  padding: 0 20px;
  display: flex;
  align-items: center;
  gap: 32px;
}

.navbar-logo {
  display: flex;
  align-items: center;
  gap: 10px;
  margin-right: auto;
}

.navbar-logo-img {
  width: 32px;
  height: 32px;
  border-radius: 8px;
}

.navbar-logo-text {
  font-family: var(--font-heading);
  font-size: 1.375rem;
}

.navbar-logo-accent {
  color: var(--color-accent-secondary);
}

.navbar-links {
  display: flex;
  list-style: none;
  gap: 28px;
}

.navbar-link {
  font-size: 0.9375rem;
  color: var(--color-text-muted);
  transition: color 150ms ease;
}

.navbar-link:hover {
  color: var(--color-text-primary);
}

.navbar-cta {
  padding: 8px 18px;
  border-radius: 999px;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--color-text-primary);
  background-color: var(--color-accent-primary);
  transition: background-color 150ms ease;
}

.navbar-cta:hover {
  background-color: var(--color-accent-secondary);
}

.drawer .navbar-link {
  font-size: 1.5rem;
}

.drawer .navbar-cta {
  text-align: center;
}

@media (max-width: 767px) {
  .navbar-links,
  .navbar-inner > .navbar-cta {
    display: none;
  }
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 120px 0 80px;
}

.hero-eyebrow {
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--color-accent-secondary);
  margin-bottom: 24px;
}

.hero-heading {
  font-size: clamp(3rem, 10vw, 6.5rem);
  line-height: 1;
  margin-bottom: 28px;
}

.hero-sub {
  max-width: 620px;
  font-size: 1.125rem;
  color: var(--color-text-muted);
  margin-bottom: 40px;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
  margin-bottom: 48px;
}

.btn-primary,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  padding: 14px 28px;
  border-radius: 999px;
  font-weight: 500;
  transition: background-color 150ms ease, border-color 150ms ease;
}

.btn-primary {
  background-color: var(--color-accent-primary);
  color: var(--color-text-primary);
}

.btn-primary:hover {
  background-color: var(--color-accent-secondary);
}

.btn-ghost {
  border: 1px solid var(--color-border);
  color: var(--color-text-primary);
}

.btn-ghost:hover {
  border-color: var(--color-text-muted);
}

.hero-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

/* Sections */
.section {
  padding: 96px 0;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 16px;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 20px;
}

/* About */
.bio-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 48px;
  margin-bottom: 96px;
}

@media (min-width: 900px) {
  .bio-grid {
    grid-template-columns: 3fr 2fr;
  }
}

.bio-text {
  display: flex;
  flex-direction: column;
  gap: 20px;
  color: var(--color-text-muted);
  font-size: 1.0625rem;
}

.skill-groups {
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.skill-group-label {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.15em;
  color: var(--color-text-primary);
  margin-bottom: 10px;
}

.skill-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.experience-item {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4px;
  padding: 20px 0;
  border-bottom: 1px solid var(--color-border);
}

@media (min-width: 768px) {
  .experience-item {
    grid-template-columns: 2fr 2fr 1fr;
    align-items: baseline;
  }
}

.exp-company {
  font-family: var(--font-heading);
  font-size: 1.375rem;
  transition: color 150ms ease;
}

.exp-company:hover {
  color: var(--color-accent-primary);
}

.exp-role {
  color: var(--color-text-muted);
}

.exp-period {
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  color: var(--color-text-muted);
}

@media (min-width: 768px) {
  .exp-period {
    text-align: right;
  }
}

/* Contact */
.contact {
  position: relative;
  padding: 96px 0 48px;
}

.contact-accent-bar {
  width: 64px;
  height: 4px;
  border-radius: 2px;
  margin-bottom: 32px;
  background: linear-gradient(90deg, var(--color-accent-primary), var(--color-accent-secondary));
}

.contact-heading {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  line-height: 1.05;
  margin-bottom: 20px;
}

.contact-sub {
  max-width: 520px;
  color: var(--color-text-muted);
  margin-bottom: 36px;
}

.contact-actions {
  margin-bottom: 36px;
}

.contact-socials {
  display: flex;
  gap: 12px;
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--color-border);
  color: var(--color-text-muted);
  transition: color 150ms ease, border-color 150ms ease;
}

.social-link:hover {
  color: var(--color-text-primary);
  border-color: var(--color-text-muted);
}

.contact-footer {
  margin-top: 96px;
  padding-top: 24px;
  border-top: 1px solid var(--color-border);
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--color-text-muted);
}
"#;
