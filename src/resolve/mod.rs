pub mod category;
pub mod faker;
pub mod locale;
pub mod resolver;
pub mod rules;
pub mod temporal;
