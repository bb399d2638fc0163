//! # TUI Components
//!
//! All UI components for the terminal viewer.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: slide title, subtitle, position and Prev/Next controls
//! - `StatusBar`: deck title, status or pending jump, footer text
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `State` lives in `TuiState`; a transient wrapper borrows it
//! each frame:
//! - `SlideView` / `SlideViewState`: scrollable slide body
//! - `PassphrasePrompt` / `PassphrasePromptState`: masked passphrase entry
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (slide header and controls)
//! ├── status_bar.rs         (footer line)
//! ├── passphrase_prompt.rs  (access gate overlay)
//! └── slide_view/           (slide body layout and scrolling)
//! ```

pub mod passphrase_prompt;
pub mod slide_view;
pub mod status_bar;
pub mod title_bar;

pub use passphrase_prompt::{PassphrasePrompt, PassphrasePromptState, PromptEvent};
pub use slide_view::{SlideView, SlideViewState};
pub use status_bar::StatusBar;
pub use title_bar::{Control, TitleBar};
