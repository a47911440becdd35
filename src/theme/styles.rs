//! Global CSS styles for the eSIM shop.
//!
//! Phone-sized layout: scrolling content above a fixed bottom tab bar.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #f6f7fb;
  --surface-card: #ffffff;
  --surface-border: #e3e6ee;

  /* BRAND */
  --brand: #4f46e5;
  --brand-soft: rgba(79, 70, 229, 0.12);
  --accent: #10b981;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #ef4444;
  --warning: #f59e0b;

  /* Typography */
  --font-sans: -apple-system, 'SF Pro Text', 'Inter', 'Segoe UI', sans-serif;

  /* Motion */
  --fade-ms: 300ms;
  --tab-height: 64px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

/* === Shell === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-content {
  flex: 1;
  padding: 1rem 1rem calc(var(--tab-height) + 1.5rem);
}

.page-header { margin-bottom: 1rem; }
.page-title { font-size: 1.6rem; font-weight: 700; margin: 0.25rem 0; }
.page-subtitle { color: var(--text-secondary); margin: 0; }

.back-link {
  color: var(--brand);
  text-decoration: none;
  font-size: 0.9rem;
}

.empty-state {
  text-align: center;
  color: var(--text-secondary);
  padding: 3rem 1rem;
}

.search-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: 12px;
  border: 1px solid var(--surface-border);
  font-size: 1rem;
  margin-bottom: 1rem;
}

/* === Cards === */
.card-list {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  touch-action: pan-y;
}

.country-card,
.package-card {
  display: flex;
  align-items: center;
  gap: 0.9rem;
  width: 100%;
  padding: 0.9rem 1rem;
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 16px;
  text-align: left;
  font: inherit;
  color: inherit;
  cursor: pointer;
  animation: card-in 240ms ease-out both;
  animation-delay: calc(var(--index) * 30ms);
  transition: transform 120ms ease, box-shadow 120ms ease;
}

.country-card:active,
.package-card:active { transform: scale(0.98); }

.country-card:hover,
.package-card:hover { box-shadow: 0 4px 14px rgba(17, 24, 39, 0.08); }

@keyframes card-in {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: none; }
}

.country-flag { font-size: 1.8rem; }
.country-info { display: flex; flex-direction: column; flex: 1; }
.country-name { font-weight: 600; }
.country-region { color: var(--text-muted); font-size: 0.85rem; }

.package-card { flex-wrap: wrap; }
.package-card.popular { border-color: var(--brand); }
.package-card.owned { background: var(--brand-soft); }
.package-header { display: flex; align-items: center; gap: 0.5rem; flex: 1 1 100%; }
.package-name { font-weight: 600; }
.package-badge {
  background: var(--brand);
  color: #fff;
  border-radius: 999px;
  padding: 0.1rem 0.55rem;
  font-size: 0.7rem;
}
.package-allowance { color: var(--text-secondary); flex: 1; }
.package-features {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
  list-style: none;
  padding: 0;
  margin: 0;
  flex: 1 1 100%;
}
.package-features li {
  font-size: 0.75rem;
  color: var(--text-secondary);
  background: var(--surface);
  border-radius: 6px;
  padding: 0.1rem 0.4rem;
}

.card-price { font-weight: 700; color: var(--brand); margin-left: auto; }
.card-chevron { color: var(--text-muted); margin-left: auto; display: flex; }

.added-notice {
  background: rgba(16, 185, 129, 0.12);
  color: #047857;
  border-radius: 12px;
  padding: 0.6rem 0.9rem;
  margin-bottom: 0.8rem;
}

/* === Swipe indicator === */
.swipe-indicator {
  position: fixed;
  left: 50%;
  bottom: calc(var(--tab-height) + 0.75rem);
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 0.8rem;
  border-radius: 999px;
  background: rgba(17, 24, 39, 0.75);
  color: #fff;
  font-size: 0.75rem;
}

/* Opacity and offset are set inline from the exit progress. */
.swipe-indicator.leaving {
  pointer-events: none;
}

.swipe-track {
  width: 28px;
  height: 4px;
  border-radius: 2px;
  background: rgba(255, 255, 255, 0.3);
  overflow: hidden;
}

.swipe-thumb {
  display: block;
  width: 40%;
  height: 100%;
  background: #fff;
  animation: swipe-hint 900ms ease-in-out infinite alternate;
}

@keyframes swipe-hint {
  from { transform: translateX(0); }
  to { transform: translateX(150%); }
}

/* === Offline banner === */
.offline-banner {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1rem;
  background: var(--warning);
  color: #111827;
  font-size: 0.85rem;
  animation: banner-in var(--fade-ms) ease-out;
  transition: opacity var(--fade-ms) ease;
}

.offline-banner.leaving {
  background: var(--accent);
  opacity: 0;
}

.offline-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: currentColor;
}

@keyframes banner-in {
  from { transform: translateY(-100%); }
  to { transform: none; }
}

/* === Tab bar === */
.tab-bar {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  height: var(--tab-height);
  display: flex;
  background: var(--surface-card);
  border-top: 1px solid var(--surface-border);
}

.tab-item {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.15rem;
  background: none;
  border: none;
  color: var(--text-muted);
  font: inherit;
  font-size: 0.7rem;
  cursor: pointer;
}

.tab-item.active { color: var(--brand); }
.tab-item.active .tab-icon { transform: translateY(-1px); }

/* === Profile === */
.settings-list { margin: 0; }
.settings-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.9rem 0;
  border-bottom: 1px solid var(--surface-border);
}
.settings-row dt { color: var(--text-secondary); }
.settings-row dd { margin: 0; font-weight: 600; }
.status.online { color: var(--accent); }
.status.offline { color: var(--danger); }

.toggle {
  min-width: 3.5rem;
  padding: 0.3rem 0.8rem;
  border-radius: 999px;
  border: 1px solid var(--surface-border);
  background: var(--surface);
  font: inherit;
  cursor: pointer;
}
.toggle.on { background: var(--brand); color: #fff; border-color: var(--brand); }
"#;
