use constcat::concat;

mod components;
mod home;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;

// the color and font variables are not in here: they are rendered from the theme
// tokens at startup, see content::theme::ThemeTokens::css_variables
pub const PAGE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
  scroll-padding-top: 80px;
}

body {
  font-family: var(--font-body);
  color: var(--color-text-primary);
  background-color: var(--color-bg);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

h1, h2, h3 {
  font-family: var(--font-heading);
  font-weight: 400;
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 20px;
}

@media (min-width: 768px) {
  .container {
    padding: 0 40px;
  }
}
"#,
    BASE_COMPONENTS,
    HOME_STYLES,
);
