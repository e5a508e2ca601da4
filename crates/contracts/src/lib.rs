//! Wire contracts shared between the sales dashboard and its backend.

pub mod domain;
