pub mod encoder;
pub mod feature_registry;
pub mod scaler;

pub use encoder::{EncoderMap, LabelEncoder, encode_record};
pub use feature_registry::{FeatureColumn, FeatureLayout, FeatureRecord, FeatureValue, FeatureVector};
pub use scaler::FeatureScaler;
