//! Property value types for the binary scene format.

mod type_id;
mod value;

pub use type_id::RbxType;
pub use value::{
    RbxAxes, RbxCFrame, RbxColor3, RbxColor3uint8, RbxColorSequenceKeypoint, RbxFaces,
    RbxNumberRange, RbxNumberSequenceKeypoint, RbxPhysicalProperties, RbxRay, RbxRect2D, RbxUDim,
    RbxUDim2, RbxValue, RbxVector2, RbxVector2int16, RbxVector3, RbxVector3int16,
};
