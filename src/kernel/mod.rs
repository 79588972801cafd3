//! Headless application core (state/action/effect).

pub mod action;
pub mod command;
pub mod effect;
pub mod icons;
pub mod services;
pub mod state;
pub mod store;
pub mod tree;

pub use action::{Action, FsOp};
pub use command::Command;
pub use effect::Effect;
pub use icons::IconId;
pub use state::{AppState, DocumentState, ExplorerState, TreeRow, UiState};
pub use store::{DispatchResult, Store};
pub use tree::{TreeIndex, TreeLoad, TreeNodeId};
