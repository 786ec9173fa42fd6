// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests of the default widgets working together in a `Gui`.

mod radio_groups;
mod routing;
mod themes;
mod widget_files;

use gable_testing::TestHarness;

use crate::default_factory;
use crate::theme::default_theme;

fn harness() -> TestHarness {
    TestHarness::create(default_theme(), default_factory())
}
