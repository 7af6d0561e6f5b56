// Page handlers, one module per section of the site

pub mod blog;
pub mod companies;
pub mod contact;
pub mod encyclopedia;
pub mod pages;
pub mod services;
