// Copyright (C) Microsoft Corporation. All rights reserved.

mod mock;

use mock::*;

use super::*;
