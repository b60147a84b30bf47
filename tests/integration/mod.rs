// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod aggregate_search_test;
pub mod engines_test;
pub mod fixtures;
