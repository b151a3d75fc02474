pub mod priest_repo;

pub use priest_repo::PriestRepository;
