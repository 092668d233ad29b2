//! Global CSS styles for the Connect desktop client.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-sunken: #f4f5f7;
  --surface-raised: #fafbfc;
  --border: #e3e6ea;

  /* Indigo (primary) */
  --indigo: #4c5fd5;
  --indigo-deep: #3a4bb8;
  --indigo-tint: rgba(76, 95, 213, 0.12);

  /* Status */
  --online-green: #2ebd6b;
  --typing-blue: #3d8bff;
  --offline-grey: #b3bac4;
  --pin-amber: #f0a92e;

  /* Text */
  --text-primary: #1c2330;
  --text-secondary: rgba(28, 35, 48, 0.68);
  --text-muted: rgba(28, 35, 48, 0.45);
  --text-on-primary: #ffffff;

  /* Semantic */
  --danger: #d64550;
  --danger-tint: rgba(214, 69, 80, 0.1);
  --read-accent: #3db2ff;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', -apple-system, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

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

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-sunken);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
  overflow: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

input, textarea {
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-primary);
}

/* === Buttons === */
.btn {
  padding: 0.5rem 1.25rem;
  border-radius: 8px;
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.btn:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--indigo);
  color: var(--text-on-primary);
}

.btn-primary:hover:not(:disabled) {
  background: var(--indigo-deep);
}

.btn-secondary {
  background: var(--surface);
  border: 1px solid var(--border);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background: var(--surface-sunken);
}

.btn-icon {
  width: 2.25rem;
  height: 2.25rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 8px;
  font-size: var(--text-lg);
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-icon:hover {
  background: var(--indigo-tint);
  color: var(--indigo);
}

.btn-icon-active {
  background: var(--indigo-tint);
  color: var(--indigo);
}

.btn-record-live {
  background: var(--danger-tint);
  color: var(--danger);
  animation: record-pulse 1.2s infinite;
}

@keyframes record-pulse {
  0%, 100% { box-shadow: 0 0 0 0 var(--danger-tint); }
  50% { box-shadow: 0 0 0 6px var(--danger-tint); }
}

/* === Inputs === */
.input {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface);
  outline: none;
  transition: border-color var(--transition-fast);
}

.input:focus {
  border-color: var(--indigo);
}

/* === Page Layout === */
.messages-page {
  display: flex;
  height: 100vh;
  background: var(--surface);
}

/* === Chat List === */
.chat-list {
  width: 320px;
  min-width: 320px;
  display: flex;
  flex-direction: column;
  border-right: 1px solid var(--border);
  background: var(--surface-raised);
}

.chat-list-mobile {
  width: 100%;
  min-width: 0;
  border-right: none;
}

.chat-list-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1rem 0.5rem;
}

.chat-list-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.chat-list-actions {
  display: flex;
  gap: 0.25rem;
}

.chat-search {
  margin: 0.25rem 1rem 0.5rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface);
  outline: none;
}

.chat-search:focus {
  border-color: var(--indigo);
}

.chat-filter-pills {
  display: flex;
  gap: 0.4rem;
  padding: 0 1rem 0.75rem;
}

.filter-pill {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--text-secondary);
  background: var(--surface-sunken);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.filter-pill:hover {
  color: var(--indigo);
}

.filter-pill-active {
  background: var(--indigo);
  color: var(--text-on-primary);
}

.chat-list-rows {
  flex: 1;
  overflow-y: auto;
}

.chat-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.65rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.chat-row:hover {
  background: var(--indigo-tint);
}

.chat-row-selected {
  background: var(--indigo-tint);
  box-shadow: inset 3px 0 0 var(--indigo);
}

.chat-avatar {
  position: relative;
  width: 2.75rem;
  height: 2.75rem;
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--indigo-tint);
}

.chat-avatar-text {
  font-size: var(--text-sm);
  font-weight: 700;
  color: var(--indigo);
}

.status-dot {
  position: absolute;
  bottom: 0;
  right: 0;
  width: 0.7rem;
  height: 0.7rem;
  border-radius: 50%;
  border: 2px solid var(--surface-raised);
}

.status-dot-online { background: var(--online-green); }
.status-dot-typing { background: var(--typing-blue); }
.status-dot-offline { background: var(--offline-grey); }

.chat-row-body {
  flex: 1;
  min-width: 0;
}

.chat-row-top {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: 0.5rem;
}

.chat-row-name {
  font-weight: 600;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.chat-row-time {
  font-size: var(--text-xs);
  color: var(--text-muted);
  flex-shrink: 0;
}

.chat-row-bottom {
  display: flex;
  align-items: center;
  gap: 0.4rem;
}

.chat-row-preview {
  flex: 1;
  min-width: 0;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.chat-row-preview-empty {
  font-style: italic;
  color: var(--text-muted);
}

.chat-row-typing {
  flex: 1;
  font-size: var(--text-sm);
  font-style: italic;
  color: var(--typing-blue);
}

.chat-row-muted {
  font-size: var(--text-xs);
}

.chat-unread-badge {
  min-width: 1.25rem;
  height: 1.25rem;
  padding: 0 0.3rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 999px;
  background: var(--indigo);
  color: var(--text-on-primary);
  font-size: var(--text-xs);
  font-weight: 700;
}

/* === Conversation Pane === */
.conversation-pane {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-width: 0;
  background: var(--surface);
}

.conversation-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.conversation-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.conversation-presence {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.conversation-messages {
  flex: 1;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  padding: 1rem 1.25rem;
}

.conversation-empty, .chat-welcome {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
}

.welcome-icon {
  font-size: 3rem;
}

.welcome-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.welcome-hint, .empty-hint {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.empty-text {
  color: var(--text-secondary);
  font-weight: 600;
}

/* === Message Bubbles === */
.message-row {
  display: flex;
  width: 100%;
}

.message-row-sent { justify-content: flex-end; }
.message-row-received { justify-content: flex-start; }

.message-bubble-column {
  display: flex;
  flex-direction: column;
  max-width: 65%;
}

.message-bubble {
  position: relative;
  padding: 0.55rem 0.85rem;
  border-radius: 14px;
  font-size: var(--text-sm);
}

.message-bubble-sent {
  background: var(--indigo);
  color: var(--text-on-primary);
  border-bottom-right-radius: 4px;
}

.message-bubble-received {
  background: var(--surface-sunken);
  color: var(--text-primary);
  border-bottom-left-radius: 4px;
}

.message-sender {
  display: block;
  font-size: var(--text-xs);
  font-weight: 700;
  margin-bottom: 0.15rem;
  color: var(--indigo);
}

.message-bubble-sent .message-sender {
  color: var(--text-on-primary);
  opacity: 0.85;
}

.message-text {
  white-space: pre-wrap;
  word-break: break-word;
}

.message-attachment, .message-voice {
  display: block;
  font-size: var(--text-sm);
  font-style: italic;
  opacity: 0.9;
}

.message-pin-indicator {
  font-size: var(--text-xs);
  color: var(--pin-amber);
  margin-bottom: 0.15rem;
}

.message-reply-indicator {
  border-left: 3px solid var(--indigo);
  background: var(--indigo-tint);
  border-radius: 6px;
  padding: 0.25rem 0.5rem;
  margin-bottom: 0.25rem;
  font-size: var(--text-xs);
}

.message-bubble-sent .message-reply-indicator {
  border-left-color: var(--text-on-primary);
  background: rgba(255, 255, 255, 0.18);
}

.message-reply-label {
  display: block;
  font-weight: 700;
  opacity: 0.8;
}

.message-reply-text {
  display: block;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
  opacity: 0.8;
}

.message-meta {
  display: flex;
  align-items: center;
  gap: 0.3rem;
  justify-content: flex-end;
  margin-top: 0.2rem;
}

.message-time {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.message-bubble-sent .message-time {
  color: var(--text-on-primary);
  opacity: 0.7;
}

.status-glyph {
  font-size: var(--text-xs);
}

.status-glyph-muted {
  color: var(--text-on-primary);
  opacity: 0.7;
}

.status-glyph-accent {
  color: var(--read-accent);
  opacity: 1;
}

/* === Reactions === */
.message-reaction-chips {
  display: flex;
  gap: 0.25rem;
  margin-top: 0.25rem;
}

.reaction-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.2rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  font-size: var(--text-xs);
  transition: border-color var(--transition-fast);
}

.reaction-chip:hover {
  border-color: var(--indigo);
}

.message-actions {
  display: flex;
  align-items: center;
  gap: 0.15rem;
  margin-top: 0.25rem;
  padding: 0.2rem 0.35rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  box-shadow: 0 2px 8px rgba(28, 35, 48, 0.08);
  align-self: flex-start;
}

.message-row-sent .message-actions {
  align-self: flex-end;
}

.quick-reaction {
  width: 1.75rem;
  height: 1.75rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  font-size: var(--text-sm);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.quick-reaction:hover {
  background: var(--indigo-tint);
  transform: scale(1.15);
}

/* === Emoji Picker === */
.emoji-picker {
  width: 260px;
  margin-top: 0.3rem;
  border: 1px solid var(--border);
  border-radius: 12px;
  background: var(--surface);
  box-shadow: 0 8px 24px rgba(28, 35, 48, 0.14);
  overflow: hidden;
  align-self: flex-start;
}

.message-row-sent .emoji-picker {
  align-self: flex-end;
}

.emoji-picker-tabs {
  display: flex;
  border-bottom: 1px solid var(--border);
  background: var(--surface-raised);
}

.emoji-tab {
  flex: 1;
  padding: 0.4rem 0;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.emoji-tab:hover {
  color: var(--indigo);
}

.emoji-tab-active {
  color: var(--indigo);
  box-shadow: inset 0 -2px 0 var(--indigo);
}

.emoji-picker-grid {
  display: grid;
  grid-template-columns: repeat(6, 1fr);
  gap: 0.15rem;
  padding: 0.5rem;
  max-height: 160px;
  overflow-y: auto;
}

.emoji-cell {
  width: 2rem;
  height: 2rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 6px;
  font-size: var(--text-lg);
  transition: background var(--transition-fast);
}

.emoji-cell:hover {
  background: var(--indigo-tint);
}

/* === Composer === */
.message-input-bar {
  border-top: 1px solid var(--border);
  background: var(--surface-raised);
  padding: 0.6rem 1rem 0.8rem;
}

.recording-error-banner {
  margin-bottom: 0.5rem;
  padding: 0.45rem 0.75rem;
  border-radius: 8px;
  background: var(--danger-tint);
  color: var(--danger);
  font-size: var(--text-sm);
}

.reply-banner {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  padding: 0.4rem 0.75rem;
  border-left: 3px solid var(--indigo);
  border-radius: 6px;
  background: var(--indigo-tint);
}

.reply-banner-label {
  font-size: var(--text-xs);
  font-weight: 700;
  color: var(--indigo);
  white-space: nowrap;
}

.reply-banner-text {
  flex: 1;
  min-width: 0;
  font-size: var(--text-xs);
  color: var(--text-secondary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.quick-reply-shelf {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 0.5rem;
}

.quick-reply-item {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.3rem 0.75rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.quick-reply-item:hover {
  border-color: var(--indigo);
  background: var(--indigo-tint);
}

.quick-reply-icon {
  font-size: var(--text-sm);
}

.attach-menu {
  display: flex;
  gap: 0.4rem;
  margin-bottom: 0.5rem;
}

.attach-menu-item {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.3rem 0.75rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.attach-menu-item:hover {
  border-color: var(--indigo);
  background: var(--indigo-tint);
}

.message-input-row {
  display: flex;
  align-items: flex-end;
  gap: 0.4rem;
}

.message-input-textarea {
  flex: 1;
  min-height: 2.5rem;
  max-height: 8rem;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 12px;
  background: var(--surface);
  resize: none;
  outline: none;
  line-height: 1.4;
  transition: border-color var(--transition-fast);
}

.message-input-textarea:focus {
  border-color: var(--indigo);
}

.message-send-btn {
  width: 2.5rem;
  height: 2.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  font-size: var(--text-lg);
  background: var(--surface-sunken);
  color: var(--text-muted);
  cursor: not-allowed;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.message-send-btn-active {
  background: var(--indigo);
  color: var(--text-on-primary);
  cursor: pointer;
}

.message-send-btn-active:hover {
  background: var(--indigo-deep);
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(28, 35, 48, 0.45);
  z-index: 100;
}

.modal {
  width: 380px;
  max-width: calc(100vw - 2rem);
  max-height: 80vh;
  display: flex;
  flex-direction: column;
  border-radius: 14px;
  background: var(--surface);
  box-shadow: 0 16px 48px rgba(28, 35, 48, 0.25);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem 0.5rem;
}

.modal-title {
  font-size: var(--text-lg);
  font-weight: 700;
}

.modal-body {
  flex: 1;
  overflow-y: auto;
  padding: 0.5rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.modal-section-label {
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
  margin-top: 0.5rem;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.45rem 0.5rem;
  border-radius: 8px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.contact-row:hover {
  background: var(--indigo-tint);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
  padding: 0.75rem 1.25rem 1rem;
}

.settings-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--border);
}

.settings-member {
  padding: 0.3rem 0;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Landing === */
.landing {
  height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: linear-gradient(160deg, var(--surface-raised), var(--indigo-tint));
}

.landing-title {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: var(--indigo);
}

.landing-subtitle {
  color: var(--text-secondary);
}

.landing-enter {
  margin-top: 1rem;
  padding: 0.65rem 1.75rem;
}

/* === Scrollbars === */
::-webkit-scrollbar {
  width: 8px;
}

::-webkit-scrollbar-track {
  background: transparent;
}

::-webkit-scrollbar-thumb {
  background: var(--border);
  border-radius: 4px;
}

::-webkit-scrollbar-thumb:hover {
  background: var(--offline-grey);
}
"#;
