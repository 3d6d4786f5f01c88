/// Use cases module containing application business logic orchestration
mod render_tree;

pub use render_tree::RenderTreeUseCase;
