pub const BASE_COMPONENTS: &str = r#"
/* Tag chips */
.tag {
  display: inline-block;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  padding: 4px 10px;
  border-radius: 999px;
  border: 1px solid var(--color-border);
  color: var(--color-text-muted);
  background-color: var(--color-surface);
}

.tag[data-variant="blue"] {
  color: var(--brand-3);
  border-color: rgba(37, 99, 235, 0.4);
  background-color: rgba(37, 99, 235, 0.1);
}

.tag[data-variant="indigo"] {
  color: var(--brand-2);
  border-color: rgba(99, 102, 241, 0.4);
  background-color: rgba(99, 102, 241, 0.1);
}

/* Section label */
.section-label {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--color-accent-secondary);
  margin-bottom: 32px;
  display: flex;
  align-items: center;
  gap: 12px;
}

.section-label::after {
  content: "";
  flex: 1;
  height: 1px;
  background-color: var(--color-border);
}

/* Gradient text */
.gradient-text {
  background: linear-gradient(135deg, var(--color-accent-primary), var(--color-accent-secondary));
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
}

/* Reveal wrapper
 *
 * content is only hidden once an observer is attached, so a host without
 * intersection support still shows every section, just without the animation */
.reveal {
  transition: opacity 600ms ease, transform 600ms ease;
}

.reveal[data-observed="true"] {
  opacity: 0;
  transform: translateY(24px);
}

.reveal[data-observed="true"][data-visible="true"] {
  opacity: 1;
  transform: none;
}

/* Stat card */
.stat-card {
  padding: 24px;
  border: 1px solid var(--color-border);
  border-radius: 12px;
  background-color: var(--color-surface);
}

.stat-number {
  font-family: var(--font-heading);
  font-size: 2.75rem;
  line-height: 1;
  color: var(--color-text-primary);
}

.stat-suffix {
  color: var(--color-accent-secondary);
}

.stat-label {
  margin-top: 8px;
  font-size: 0.875rem;
  color: var(--color-text-muted);
}

/* Project card */
.project-card {
  display: flex;
  flex-direction: column;
  gap: 12px;
  padding: 28px;
  border: 1px solid var(--color-border);
  border-radius: 12px;
  background-color: var(--color-surface);
  transition: border-color 200ms ease, transform 200ms ease;
}

a.project-card:hover {
  border-color: var(--color-accent-secondary);
  transform: translateY(-2px);
}

.project-card.featured {
  grid-column: 1 / -1;
  display: grid;
  grid-template-columns: 1fr;
  gap: 32px;
  background-color: var(--color-elevated);
}

@media (min-width: 900px) {
  .project-card.featured {
    grid-template-columns: 1fr 1fr;
  }
}

.project-number {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--color-accent-secondary);
}

.project-title {
  font-size: 1.75rem;
}

.project-description {
  color: var(--color-text-muted);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.project-role-header {
  display: flex;
  justify-content: space-between;
  gap: 12px;
  padding-bottom: 12px;
  border-bottom: 1px solid var(--color-border);
  margin-bottom: 12px;
}

.project-role-title {
  font-weight: 600;
}

.project-role-period {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--color-text-muted);
}

.project-highlights-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.project-highlight {
  position: relative;
  padding-left: 18px;
  color: var(--color-text-muted);
  font-size: 0.9375rem;
}

.project-highlight::before {
  content: "";
  position: absolute;
  left: 0;
  top: 0.65em;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background-color: var(--color-accent-primary);
}

.project-link {
  margin-top: auto;
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  color: var(--color-accent-primary);
}

.project-arrow {
  display: inline-block;
  margin-left: 6px;
  transition: transform 200ms ease;
}

a.project-card:hover .project-arrow {
  transform: translateX(4px);
}

/* Burger toggle */
.burger {
  display: none;
  flex-direction: column;
  justify-content: center;
  gap: 5px;
  width: 32px;
  height: 32px;
  background: none;
  border: none;
  cursor: pointer;
}

.burger span {
  display: block;
  height: 2px;
  width: 20px;
  margin: 0 auto;
  background-color: var(--color-text-primary);
  transition: transform 200ms ease, opacity 200ms ease;
}

.burger[data-opened="true"] span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.burger[data-opened="true"] span:nth-child(2) {
  opacity: 0;
}

.burger[data-opened="true"] span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 767px) {
  .burger {
    display: flex;
  }
}

/* Drawer */
.drawer-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  background-color: rgba(0, 0, 0, 0.6);
}

.drawer {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  z-index: 201;
  width: min(320px, 85vw);
  padding: 32px;
  background-color: var(--color-bg);
  border-right: 1px solid var(--color-border);
  overflow-y: auto;
}

.drawer-header {
  display: flex;
  justify-content: flex-end;
  margin-bottom: 32px;
}

.drawer-close {
  background: none;
  border: none;
  font-size: 1.75rem;
  line-height: 1;
  color: var(--color-text-muted);
  cursor: pointer;
}

.drawer-body {
  display: flex;
  flex-direction: column;
  gap: 32px;
}
"#;
