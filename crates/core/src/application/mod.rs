// Application Layer - Use cases exposed to API layers

pub mod job_board;

pub use job_board::JobBoardService;
