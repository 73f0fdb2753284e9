//! Global CSS styles for AstroGit.
//!
//! Night-sky gradient card with indigo accents. Trait bar colors are
//! generated separately by `trait_styles`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT SKY (Backgrounds) */
  --sky-indigo: #312e81;
  --sky-purple: #581c87;
  --sky-blue: #1e3a8a;
  --sky-border: #818cf8;

  /* ACCENTS */
  --indigo: #4f46e5;
  --indigo-hover: #6366f1;
  --indigo-deep: #3730a3;
  --blue: #2563eb;
  --blue-hover: #3b82f6;

  /* TEXT */
  --text-primary: #f5f5ff;
  --text-secondary: #c7d2fe;
  --text-muted: #a5b4fc;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100vh;
  background: #0b0b1f;
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

.app-shell {
  display: flex;
  justify-content: center;
  padding: 1.5rem;
}

/* === Card Shell === */
.horoscope-card-wrap {
  width: 100%;
  max-width: 48rem;
  margin: 1.5rem auto;
}

.horoscope-card {
  position: relative;
  overflow: hidden;
  padding: 2rem;
  border: 1px solid var(--sky-border);
  border-radius: 1rem;
  background: linear-gradient(to bottom right, var(--sky-indigo), var(--sky-purple), var(--sky-blue));
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.horoscope-card__content {
  position: relative;
  z-index: 10;
}

/* === Star Field === */
.star-field {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.star {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 9999px;
  background: #ffffff;
  opacity: 0.7;
  box-shadow: 0 0 4px 1px rgba(255, 255, 255, 0.8);
  animation-name: pulse;
  animation-iteration-count: infinite;
  animation-timing-function: cubic-bezier(0.4, 0, 0.6, 1);
}

@keyframes pulse {
  50% { opacity: 0.2; }
}

@keyframes ping {
  75%, 100% { transform: scale(2); opacity: 0; }
}

/* === Header === */
.horoscope-card__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.horoscope-card__kicker {
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.horoscope-card__title {
  font-size: 1.875rem;
  font-weight: 700;
  background: linear-gradient(to right, #93c5fd, #d8b4fe);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.horoscope-card__date {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Cosmic Score === */
.cosmic-score {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid var(--sky-border);
  border-radius: 9999px;
  background: rgba(55, 48, 163, 0.5);
}

.cosmic-score__value {
  font-size: 1.125rem;
  font-weight: 600;
}

.cosmic-score__orb {
  position: relative;
  width: 2rem;
  height: 2rem;
}

.cosmic-score__ping {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  background: var(--indigo-hover);
  opacity: 0.3;
  animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.cosmic-score__emoji {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
}

.cosmic-score__label {
  font-size: 0.75rem;
  line-height: 1.1;
  color: var(--text-secondary);
}

/* === Body === */
.horoscope-card__body {
  margin-bottom: 1.5rem;
  padding: 1.25rem;
  border: 1px solid #4338ca;
  border-radius: 0.75rem;
  background: rgba(49, 46, 129, 0.4);
  backdrop-filter: blur(4px);
}

.tab-pills {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.message-paragraphs {
  min-height: 200px;
}

.message-paragraph {
  font-size: 1.125rem;
  line-height: 1.625;
}

.message-paragraph + .message-paragraph {
  margin-top: 0.75rem;
}

/* === Trait Bars === */
.trait-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  min-height: 200px;
}

.trait-bar__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}

.trait-bar__name {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.trait-bar__icon {
  font-size: 1.25rem;
}

.trait-bar__score {
  font-weight: 700;
}

.trait-bar__track {
  position: relative;
  height: 1.5rem;
  overflow: hidden;
  border-radius: 9999px;
  background: rgba(55, 48, 163, 0.5);
}

.trait-bar__fill {
  position: absolute;
  top: 0;
  left: 0;
  height: 100%;
  border-radius: 9999px;
  transition: width var(--transition-normal);
}

.trait-bar__shine {
  position: absolute;
  inset: 0;
  background: #ffffff;
  opacity: 0.3;
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.trait-bar__caption {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary,
.btn-share,
.btn-tab {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: none;
  color: var(--text-primary);
  font-family: var(--font-sans);
  cursor: pointer;
  transition: background-color var(--transition-fast);
}

.btn-primary,
.btn-share {
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

.btn-primary {
  background: var(--indigo);
}

.btn-primary:hover {
  background: var(--indigo-hover);
}

.btn-primary.copied {
  background: #059669;
}

.btn-share {
  background: var(--blue);
}

.btn-share:hover {
  background: var(--blue-hover);
}

.btn-tab {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  background: rgba(55, 48, 163, 0.5);
  font-size: 1rem;
}

.btn-tab:hover {
  background: #4338ca;
}

.btn-tab.active {
  background: var(--indigo);
}

.btn-icon {
  width: 1.25rem;
  height: 1.25rem;
}

/* === Actions & Footer === */
.horoscope-card__actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.horoscope-card__footer {
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Load Error === */
.load-error {
  max-width: 32rem;
  margin: 4rem auto;
  padding: 2rem;
  border: 1px solid var(--sky-border);
  border-radius: 1rem;
  text-align: center;
}

.load-error p {
  margin-top: 0.75rem;
  color: var(--text-secondary);
  word-break: break-word;
}

/* === Responsive === */
@media (max-width: 640px) {
  .horoscope-card__header {
    flex-direction: column;
    text-align: center;
  }

  .trait-grid {
    grid-template-columns: minmax(0, 1fr);
  }

  .horoscope-card__actions {
    flex-direction: column;
  }

  .horoscope-card__footer span {
    display: block;
  }

  .horoscope-card__footer-sep {
    display: none !important;
  }
}
"#;
