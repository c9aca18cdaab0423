// Copyright (C) Microsoft Corporation. All rights reserved.


use super::*;
use crate::test_support::*;
