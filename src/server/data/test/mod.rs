mod article;
mod game;
mod purchase;
mod user;
