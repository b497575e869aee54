// News proxy: upstream feed client behind a trait, batched top-stories fetch,
// and its route handler.

pub mod feed;
pub mod handlers;
pub mod proxy;
