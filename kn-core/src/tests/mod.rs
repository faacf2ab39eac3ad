
use kn_testutils::*;
use rstest::*;

use crate::prelude::*;
