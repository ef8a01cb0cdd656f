/// Use cases module containing application business logic orchestration
mod check_eol;

pub use check_eol::{effective_workers, CheckEolUseCase};
