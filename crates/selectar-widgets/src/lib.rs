//! Widget implementations for Selectar selection controls.

pub mod focus;
pub mod group;
pub mod option;
pub mod projection;
pub mod resolver;
pub mod state;

pub use focus::FocusRegistry;
pub use group::{ChangeNotifier, ChoiceChanged, ChoiceGroup, GroupConfig};
pub use option::{ChoiceOption, ChoiceOptionSpec, IconDescriptor, OptionImage};
pub use projection::{
    FieldRender, FieldVariant, GroupIds, GroupLabelRender, GroupRender, ImageRender, InputRender,
    OptionRender, TextLabel,
};
pub use state::GroupState;
