pub mod agent_board;
pub mod header;
pub mod status_board;
pub mod suggestions;
pub mod tile;
pub mod unassigned;
