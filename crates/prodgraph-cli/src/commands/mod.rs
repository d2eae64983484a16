pub mod grammar_loader;
pub mod rules;
pub mod run;
