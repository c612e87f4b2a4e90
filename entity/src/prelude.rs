pub use super::article::Entity as Article;
pub use super::cart::Entity as Cart;
pub use super::game::Entity as Game;
pub use super::purchase::Entity as Purchase;
pub use super::sale::Entity as Sale;
pub use super::user::Entity as User;
