mod delete_test;

use kn_testutils::*;
use rstest::*;

use super::*;
