//! Global CSS styles for Cardforge.
//!
//! Dark form beside a light card, so the preview reads like the printed result.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --ink: #111114;
  --ink-lighter: #1b1b1f;
  --ink-border: #2a2a30;

  /* Accent */
  --teal: #00b39a;
  --teal-glow: rgba(0, 179, 154, 0.3);
  --gold: #d4af37;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Card */
  --card-paper: #ffffff;
  --card-ink: #1b1b1f;

  /* Semantic */
  --danger: #ff3366;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --transition-fast: 150ms ease;
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
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--gold);
  margin-bottom: 1.5rem;
}

/* === Layout === */
.card-creator {
  display: flex;
  gap: 2rem;
  align-items: flex-start;
  padding: 2rem;
}

.card-creator__form {
  flex: 1 1 0;
  min-width: 0;
}

.preview-wrapper {
  flex: 1 1 0;
  top: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

@media (max-width: 768px) {
  .card-creator {
    flex-direction: column;
    padding: 1rem;
  }

  .preview-wrapper {
    width: 100%;
  }
}

/* === Form === */
.card-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.input-field {
  background: transparent;
  border: 1px solid var(--ink-border);
  border-radius: 4px;
  color: var(--teal);
  font-family: inherit;
  font-size: var(--text-base);
  padding: 0.5rem 0.75rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 3px var(--teal-glow);
}

.textarea {
  resize: vertical;
}

.card-form__images {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 1rem;
}

.card-form__advanced summary {
  cursor: pointer;
  color: var(--text-muted);
  margin-bottom: 0.75rem;
}

.card-form__advanced .form-field {
  margin-bottom: 0.75rem;
}

.checkbox-field {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.card-form__actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

/* === Image picker === */
.image-picker__row {
  display: flex;
  gap: 0.5rem;
}

.image-picker__btn,
.image-picker__clear {
  background: var(--ink-lighter);
  border: 1px dashed var(--ink-border);
  border-radius: 4px;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 0.5rem 0.75rem;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.image-picker__btn {
  flex: 1;
}

.image-picker__error {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  border-radius: 4px;
  cursor: pointer;
  font-family: inherit;
  font-size: var(--text-base);
  padding: 0.6rem 1.25rem;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--teal);
  border: 1px solid var(--teal);
  color: var(--ink);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 12px var(--teal-glow);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--ink-border);
  color: var(--text-secondary);
}

.vcard-export__status {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Preview === */
.card-preview {
  background: var(--card-paper);
  color: var(--card-ink);
  border-radius: 8px;
  padding: 1.5rem;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.4);
  overflow-wrap: anywhere;
}

.card-preview__image {
  display: block;
  margin-bottom: 1rem;
}

.card-preview__name {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.card-preview__line {
  margin-bottom: 0.25rem;
  white-space: pre-wrap;
}

/* === Generated URL === */
.generated-url {
  background: var(--ink-lighter);
  border: 1px solid var(--teal);
  border-radius: 8px;
  padding: 1rem;
}

.generated-url--pending {
  border-color: var(--ink-border);
  color: var(--text-muted);
}

.generated-url--error {
  border-color: var(--danger);
  color: var(--danger);
}

.generated-url__link {
  color: var(--teal);
  word-break: break-all;
}

.generated-url__actions {
  margin: 0.75rem 0;
}

.generated-url__qr {
  display: block;
  width: 160px;
  height: 160px;
}

.generated-url__reason {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}
"#;
