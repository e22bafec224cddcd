//! Ready-made containers for every primitive scalar type (feature `primitives`).

crate::define_opt_primitives!();
