//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let game = factory::game::create_game(&db).await?;
//!
//! // Create an article with everything it depends on
//! let (user, game, purchase, article) =
//!     factory::helpers::create_article_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod cart;
pub mod game;
pub mod helpers;
pub mod purchase;
pub mod sale;
pub mod user;

pub use article::create_article;
pub use cart::create_cart;
pub use game::create_game;
pub use purchase::create_purchase;
pub use sale::create_sale;
pub use user::create_user;
