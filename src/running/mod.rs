mod lag_difference;
pub use lag_difference::LagDifference;

mod maximum;
pub use maximum::RunningMaximum;

mod minimum;
pub use minimum::RunningMinimum;

mod product;
pub use product::RunningProduct;

mod range;
pub use range::RunningRange;

mod sum;
pub use sum::RunningSum;
