mod common;
mod risks;
mod routing;
