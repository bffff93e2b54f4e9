//! Property value types.

use std::fmt;

use super::RbxType;

/// A property value of one of the wire kinds.
///
/// The set of variants is closed: the codec matches exhaustively, so a new
/// kind cannot be added without extending every packing rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RbxValue {
    /// Raw byte string; not required to be valid UTF-8.
    String(Vec<u8>),
    Bool(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    UDim(RbxUDim),
    UDim2(RbxUDim2),
    Ray(RbxRay),
    Faces(RbxFaces),
    Axes(RbxAxes),
    BrickColor(u32),
    Color3(RbxColor3),
    Vector2(RbxVector2),
    Vector3(RbxVector3),
    Vector2int16(RbxVector2int16),
    CFrame(RbxCFrame),
    Token(u32),
    Reference(i32),
    Vector3int16(RbxVector3int16),
    NumberSequence(Vec<RbxNumberSequenceKeypoint>),
    ColorSequence(Vec<RbxColorSequenceKeypoint>),
    NumberRange(RbxNumberRange),
    Rect2D(RbxRect2D),
    PhysicalProperties(RbxPhysicalProperties),
    Color3uint8(RbxColor3uint8),
    Int64(i64),
    SharedString(u32),
}

impl RbxValue {
    /// Returns the wire type tag of this value's kind.
    pub fn type_id(&self) -> RbxType {
        match self {
            Self::String(_) => RbxType::String,
            Self::Bool(_) => RbxType::Bool,
            Self::Int(_) => RbxType::Int,
            Self::Float(_) => RbxType::Float,
            Self::Double(_) => RbxType::Double,
            Self::UDim(_) => RbxType::UDim,
            Self::UDim2(_) => RbxType::UDim2,
            Self::Ray(_) => RbxType::Ray,
            Self::Faces(_) => RbxType::Faces,
            Self::Axes(_) => RbxType::Axes,
            Self::BrickColor(_) => RbxType::BrickColor,
            Self::Color3(_) => RbxType::Color3,
            Self::Vector2(_) => RbxType::Vector2,
            Self::Vector3(_) => RbxType::Vector3,
            Self::Vector2int16(_) => RbxType::Vector2int16,
            Self::CFrame(_) => RbxType::CFrame,
            Self::Token(_) => RbxType::Token,
            Self::Reference(_) => RbxType::Reference,
            Self::Vector3int16(_) => RbxType::Vector3int16,
            Self::NumberSequence(_) => RbxType::NumberSequence,
            Self::ColorSequence(_) => RbxType::ColorSequence,
            Self::NumberRange(_) => RbxType::NumberRange,
            Self::Rect2D(_) => RbxType::Rect2D,
            Self::PhysicalProperties(_) => RbxType::PhysicalProperties,
            Self::Color3uint8(_) => RbxType::Color3uint8,
            Self::Int64(_) => RbxType::Int64,
            Self::SharedString(_) => RbxType::SharedString,
        }
    }

    /// Constructs the zero value of the given kind.
    ///
    /// Collaborators that materialize defaults before decoding (the XML
    /// codec, the instance tree) start from these.
    pub fn zero(type_id: RbxType) -> RbxValue {
        match type_id {
            RbxType::String => Self::String(Vec::new()),
            RbxType::Bool => Self::Bool(false),
            RbxType::Int => Self::Int(0),
            RbxType::Float => Self::Float(0.0),
            RbxType::Double => Self::Double(0.0),
            RbxType::UDim => Self::UDim(RbxUDim::default()),
            RbxType::UDim2 => Self::UDim2(RbxUDim2::default()),
            RbxType::Ray => Self::Ray(RbxRay::default()),
            RbxType::Faces => Self::Faces(RbxFaces::default()),
            RbxType::Axes => Self::Axes(RbxAxes::default()),
            RbxType::BrickColor => Self::BrickColor(0),
            RbxType::Color3 => Self::Color3(RbxColor3::default()),
            RbxType::Vector2 => Self::Vector2(RbxVector2::default()),
            RbxType::Vector3 => Self::Vector3(RbxVector3::default()),
            RbxType::Vector2int16 => Self::Vector2int16(RbxVector2int16::default()),
            RbxType::CFrame => Self::CFrame(RbxCFrame::default()),
            RbxType::Token => Self::Token(0),
            RbxType::Reference => Self::Reference(0),
            RbxType::Vector3int16 => Self::Vector3int16(RbxVector3int16::default()),
            RbxType::NumberSequence => Self::NumberSequence(Vec::new()),
            RbxType::ColorSequence => Self::ColorSequence(Vec::new()),
            RbxType::NumberRange => Self::NumberRange(RbxNumberRange::default()),
            RbxType::Rect2D => Self::Rect2D(RbxRect2D::default()),
            RbxType::PhysicalProperties => {
                Self::PhysicalProperties(RbxPhysicalProperties::default())
            }
            RbxType::Color3uint8 => Self::Color3uint8(RbxColor3uint8::default()),
            RbxType::Int64 => Self::Int64(0),
            RbxType::SharedString => Self::SharedString(0),
        }
    }
}

// -- Composite payloads --

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxUDim {
    pub scale: f32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxUDim2 {
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxRay {
    pub origin_x: f32,
    pub origin_y: f32,
    pub origin_z: f32,
    pub direction_x: f32,
    pub direction_y: f32,
    pub direction_z: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxFaces {
    pub right: bool,
    pub top: bool,
    pub back: bool,
    pub left: bool,
    pub bottom: bool,
    pub front: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxColor3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxVector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxVector2int16 {
    pub x: i16,
    pub y: i16,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxVector3int16 {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxCFrame {
    /// Zero for a full rotation matrix; any other value selects one of the
    /// format's predefined axis-aligned rotations, which the codec carries
    /// through without interpreting.
    pub special: u8,
    /// Row-major 3x3 rotation; all zero when `special` is non-zero.
    pub rotation: [f32; 9],
    pub position: RbxVector3,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxNumberSequenceKeypoint {
    pub time: f32,
    pub value: f32,
    pub envelope: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxColorSequenceKeypoint {
    pub time: f32,
    pub color: RbxColor3,
    pub envelope: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxNumberRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxRect2D {
    pub min: RbxVector2,
    pub max: RbxVector2,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxPhysicalProperties {
    /// Non-zero when the five custom physics fields are present on the wire.
    pub custom_physics: u8,
    pub density: f32,
    pub friction: f32,
    pub elasticity: f32,
    pub friction_weight: f32,
    pub elasticity_weight: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RbxColor3uint8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// -- Convenience conversions --

impl From<bool> for RbxValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for RbxValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i64> for RbxValue {
    fn from(i: i64) -> Self {
        Self::Int64(i)
    }
}

impl From<f32> for RbxValue {
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for RbxValue {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<Vec<u8>> for RbxValue {
    fn from(b: Vec<u8>) -> Self {
        Self::String(b)
    }
}

impl From<&[u8]> for RbxValue {
    fn from(b: &[u8]) -> Self {
        Self::String(b.to_vec())
    }
}

impl From<RbxVector2> for RbxValue {
    fn from(v: RbxVector2) -> Self {
        Self::Vector2(v)
    }
}

impl From<RbxVector3> for RbxValue {
    fn from(v: RbxVector3) -> Self {
        Self::Vector3(v)
    }
}

impl From<RbxCFrame> for RbxValue {
    fn from(cf: RbxCFrame) -> Self {
        Self::CFrame(cf)
    }
}

impl From<RbxColor3> for RbxValue {
    fn from(c: RbxColor3) -> Self {
        Self::Color3(c)
    }
}

impl fmt::Display for RbxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(b) => write!(f, "<{} bytes>", b.len()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Double(x) => write!(f, "{x}"),
            Self::UDim(u) => write!(f, "{}, {}", u.scale, u.offset),
            Self::UDim2(u) => write!(
                f,
                "{{{}, {}}}, {{{}, {}}}",
                u.scale_x, u.offset_x, u.scale_y, u.offset_y
            ),
            Self::Ray(r) => write!(
                f,
                "({}, {}, {}) -> ({}, {}, {})",
                r.origin_x, r.origin_y, r.origin_z, r.direction_x, r.direction_y, r.direction_z
            ),
            Self::Faces(_) => write!(f, "<faces>"),
            Self::Axes(_) => write!(f, "<axes>"),
            Self::BrickColor(c) => write!(f, "brickcolor({c})"),
            Self::Color3(c) => write!(f, "({}, {}, {})", c.r, c.g, c.b),
            Self::Vector2(v) => write!(f, "({}, {})", v.x, v.y),
            Self::Vector3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Self::Vector2int16(v) => write!(f, "({}, {})", v.x, v.y),
            Self::CFrame(cf) => write!(
                f,
                "cframe(special: {}, position: ({}, {}, {}))",
                cf.special, cf.position.x, cf.position.y, cf.position.z
            ),
            Self::Token(t) => write!(f, "token({t})"),
            Self::Reference(r) => write!(f, "ref({r})"),
            Self::Vector3int16(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Self::NumberSequence(ks) => write!(f, "<number sequence, {} keypoints>", ks.len()),
            Self::ColorSequence(ks) => write!(f, "<color sequence, {} keypoints>", ks.len()),
            Self::NumberRange(r) => write!(f, "[{}, {}]", r.min, r.max),
            Self::Rect2D(r) => {
                write!(f, "({}, {}), ({}, {})", r.min.x, r.min.y, r.max.x, r.max.y)
            }
            Self::PhysicalProperties(p) => {
                if p.custom_physics != 0 {
                    write!(f, "physics({}, {}, {})", p.density, p.friction, p.elasticity)
                } else {
                    write!(f, "physics(default)")
                }
            }
            Self::Color3uint8(c) => write!(f, "({}, {}, {})", c.r, c.g, c.b),
            Self::Int64(i) => write!(f, "{i}"),
            Self::SharedString(s) => write!(f, "sharedstring({s})"),
        }
    }
}
