// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data shaping for tipsviz charts.
//!
//! This crate turns a materialized record set into the shapes chart layouts consume:
//! - typed [`Record`]s (parsed from string fields, with rejected rows surfaced to the caller),
//! - filtered subsets ([`RangeFilter`]),
//! - grouped reductions ([`group_reduce`], [`rollup`]), and
//! - cumulative stacked bands ([`stack`]).
//!
//! Everything here is a pure function of its inputs: no state is kept between calls, so
//! identical input always yields identical output.

#![no_std]

extern crate alloc;

mod aggregate;
mod filter;
mod record;
mod stack;

pub use aggregate::{AggregateOp, AggregatedEntry, group_reduce, reorder, rollup};
pub use filter::RangeFilter;
pub use record::{
    DAY_ORDER, NumericField, ParsedRecords, Record, RecordError, RecordField, extent,
    parse_records,
};
pub use stack::{StackBand, StackedSeries, stack, stack_extent};
