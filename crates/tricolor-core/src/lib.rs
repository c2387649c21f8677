pub mod error;
pub mod consts;
pub mod filter;
pub mod plane;
pub mod channel_set;
pub mod diff;
pub mod align;
pub mod composite;
pub mod manifest;
pub mod io;
pub mod pipeline;
pub mod archive;
