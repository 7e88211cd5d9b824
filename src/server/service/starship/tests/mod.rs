
use super::*;

use shiptrader_test_utils::prelude::*;
