/// One training sample: two input features and the expected label.
///
/// `one` and `two` are the network's first and second inputs. When loaded
/// from CSV, `one` comes from the weight column and `two` from the height
/// column; see `data::loader` for how they are centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example {
    pub one: f64,
    pub two: f64,
    /// `0.0` for "Male", `1.0` otherwise.
    pub expected: f64,
}

impl Example {
    pub fn new(one: f64, two: f64, expected: f64) -> Example {
        Example { one, two, expected }
    }
}
