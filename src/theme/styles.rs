//! Global CSS for the showcase app.
//!
//! The custom properties mirror the light-theme output of the token
//! build, so the showcase looks the same as a token-consuming app.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties (token build, light theme) === */
:root {
  --prism-color-gray-100: #f5f6f7;
  --prism-color-gray-300: #d7dadd;
  --prism-color-gray-500: #707a85;
  --prism-color-gray-900: #101418;
  --prism-color-brand-500: #0a3055;
  --prism-color-accent-500: #00bfa5;

  --prism-color-background: var(--prism-color-gray-100);
  --prism-color-surface: #ffffff;
  --prism-color-border: var(--prism-color-gray-300);
  --prism-color-text-primary: var(--prism-color-gray-900);
  --prism-color-text-muted: var(--prism-color-gray-500);
  --prism-color-primary: var(--prism-color-brand-500);
  --prism-color-focus: var(--prism-color-accent-500);

  --prism-spacing-1: 0.25rem;
  --prism-spacing-2: 0.5rem;
  --prism-spacing-3: 1rem;
  --prism-spacing-4: 1.5rem;

  --prism-font-family-base: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
}

body {
  background: var(--prism-color-background);
  color: var(--prism-color-text-primary);
  font-family: var(--prism-font-family-base);
}

.showcase {
  max-width: 40rem;
  margin: 0 auto;
  padding: var(--prism-spacing-4);
}

.showcase section {
  margin-top: var(--prism-spacing-4);
}

.showcase h2 {
  margin-bottom: var(--prism-spacing-2);
  font-size: 1.125rem;
}

/* === SearchField === */
.prism-search {
  display: flex;
  align-items: center;
  gap: var(--prism-spacing-2);
}

.prism-searchfield {
  display: flex;
  align-items: center;
  flex: 1;
  gap: var(--prism-spacing-1);
  padding: var(--prism-spacing-1) var(--prism-spacing-2);
  background: var(--prism-color-surface);
  border: 1px solid var(--prism-color-border);
  border-radius: 0.25rem;
}

.prism-searchfield.has-focus {
  border-color: var(--prism-color-focus);
  outline: 2px solid var(--prism-color-focus);
  outline-offset: 1px;
}

.prism-searchfield__label {
  color: var(--prism-color-text-muted);
  font-size: 0.875rem;
  white-space: nowrap;
}

.prism-searchfield__input {
  flex: 1;
  border: none;
  outline: none;
  background: transparent;
  color: var(--prism-color-text-primary);
  padding: var(--prism-spacing-1);
}

.prism-searchfield__input::placeholder {
  color: var(--prism-color-text-muted);
  font-style: italic;
}

.prism-searchfield__submit,
.prism-icon-btn {
  border: none;
  background: transparent;
  cursor: pointer;
  padding: var(--prism-spacing-1);
  color: var(--prism-color-text-muted);
}

.prism-searchfield__submit:hover,
.prism-icon-btn:hover {
  color: var(--prism-color-text-primary);
}

/* === Buttons === */
.prism-btn--primary {
  background: var(--prism-color-primary);
  color: #ffffff;
  border: 1px solid var(--prism-color-primary);
  border-radius: 0.25rem;
  padding: var(--prism-spacing-1) var(--prism-spacing-3);
  cursor: pointer;
}

.prism-btn--secondary {
  background: transparent;
  color: var(--prism-color-primary);
  border: 1px solid var(--prism-color-primary);
  border-radius: 0.25rem;
  padding: var(--prism-spacing-1) var(--prism-spacing-3);
  cursor: pointer;
}

.prism-btn--ghost {
  background: transparent;
  color: var(--prism-color-text-muted);
  border: none;
  padding: var(--prism-spacing-1) var(--prism-spacing-2);
  cursor: pointer;
}

/* === Utilities === */
.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.showcase__log {
  list-style: none;
  padding: var(--prism-spacing-2);
  background: var(--prism-color-surface);
  border: 1px solid var(--prism-color-border);
  border-radius: 0.25rem;
  font-size: 0.875rem;
  color: var(--prism-color-text-muted);
}
"#;
