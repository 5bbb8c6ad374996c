/* src/site/src/config/tests/mod.rs */

use super::*;

mod loading;
mod parsing;
mod validation;
