//! Global CSS styles for ChronoShift.
//!
//! Light slate surfaces with blue accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --page-bg: #f1f5f9;
  --card-bg: #ffffff;
  --card-border: #e2e8f0;
  --muted-surface: #f8fafc;
  --field-border: #cbd5e1;

  /* Text */
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #64748b;
  --title-blue: #1e3a8a;

  /* Accent */
  --blue: #2563eb;
  --blue-soft: #60a5fa;
  --blue-hover: #93c5fd;
  --blue-wash: #eff6ff;
  --amber-wash: #fffbeb;
  --amber-border: #fde68a;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;
  --text-5xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

#main {
  flex: 1;
  display: flex;
  flex-direction: column;
}

/* === Layout === */
.layout {
  flex: 1;
  display: flex;
  flex-direction: column;
}

.layout.centered {
  align-items: center;
  justify-content: center;
}

.page-container {
  width: 100%;
  margin: 0 auto;
  padding: 0 1rem;
}

.max-w-sm { max-width: 24rem; }
.max-w-md { max-width: 28rem; }
.max-w-lg { max-width: 32rem; }
.max-w-xl { max-width: 36rem; }
.max-w-2xl { max-width: 42rem; }
.max-w-4xl { max-width: 56rem; }
.max-w-full { max-width: 100%; }

.text-center { text-align: center; }

.hero {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 3rem 0;
}

/* === Typography === */
.page-title {
  font-size: var(--text-5xl);
  font-weight: 700;
  color: var(--title-blue);
  margin-bottom: 2rem;
}

.tagline {
  font-size: var(--text-xl);
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto 4rem;
}

.section-header {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--title-blue);
  margin-bottom: 1rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

/* === Converter === */
.converter {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 3rem;
  text-align: left;
}

.converter-side {
  position: relative;
}

.side-badge {
  position: absolute;
  top: -1rem;
  left: 1.5rem;
  background: var(--card-bg);
  padding: 0 0.75rem;
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-primary);
  z-index: 1;
}

.converter-arrow {
  display: flex;
  justify-content: center;
}

.arrow-badge {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--blue);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

/* === Selector Card === */
.selector-card {
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-normal);
}

.selector-card:hover {
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.selector-section {
  margin-bottom: 1.5rem;
}

.selector-section:last-child {
  margin-bottom: 0.5rem;
}

/* === Form Fields === */
.form-field {
  position: relative;
}

.input-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

.input-anchor {
  position: relative;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--field-border);
  border-radius: 0.5rem;
  background: var(--card-bg);
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:hover {
  border-color: var(--blue-hover);
}

.input-field:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 2px var(--blue);
}

.input-field.locked {
  background: var(--muted-surface);
  color: var(--text-muted);
}

/* === Suggestions === */
.suggestion-list {
  position: absolute;
  z-index: 10;
  width: 100%;
  margin-top: 0.25rem;
  background: var(--card-bg);
  border: 1px solid var(--field-border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  max-height: 12rem;
  overflow-y: auto;
}

.btn-suggestion {
  display: block;
  width: 100%;
  padding: 0.5rem 1rem;
  text-align: left;
  background: none;
  border: none;
  border-bottom: 1px solid #f1f5f9;
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-primary);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-suggestion:last-child {
  border-bottom: none;
}

.btn-suggestion:hover {
  background: var(--blue-wash);
}

/* === Segmented Time Input === */
.time-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
}

.digit-slot {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.time-colon {
  font-size: var(--text-4xl);
  font-weight: 700;
  color: var(--blue-soft);
}

.digit-box {
  width: 4rem;
  height: 4rem;
  text-align: center;
  border: 1px solid var(--field-border);
  border-radius: 0.5rem;
  background: var(--card-bg);
  font-family: inherit;
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.digit-box:hover {
  border-color: var(--blue-hover);
}

.digit-box:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 2px var(--blue);
}

.digit-box.locked {
  background: #f1f5f9;
  color: var(--text-secondary);
  cursor: default;
}

/* === Buttons === */
.segment-toggle {
  display: flex;
  gap: 0.5rem;
}

.btn-segment {
  padding: 0.75rem 1rem;
  border: 1px solid transparent;
  border-radius: 0.5rem;
  background: #f1f5f9;
  color: var(--text-secondary);
  font-family: inherit;
  font-size: var(--text-lg);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-segment:hover {
  background: var(--amber-wash);
  border-color: var(--amber-border);
}

.btn-segment.active {
  background: var(--blue);
  color: #ffffff;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.btn-segment.locked {
  cursor: default;
  opacity: 0.5;
}

.btn-primary {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 0.5rem;
  background: var(--blue);
  color: #ffffff;
  font-family: inherit;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
}

/* === Responsive === */
@media (min-width: 640px) {
  .page-title {
    font-size: 3.75rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_cover_component_classes() {
        for class in [
            ".layout",
            ".page-container",
            ".selector-card",
            ".suggestion-list",
            ".btn-suggestion",
            ".digit-box",
            ".btn-segment.active",
            ".time-colon",
        ] {
            assert!(GLOBAL_STYLES.contains(class), "missing {}", class);
        }
    }
}
