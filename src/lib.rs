macro_rules! impl_setter {
    ($self:ident, $field:ident, $type:ty) => {
        pub fn $field(mut $self, $field: $type) -> Self {
            $self.$field = $field;
            $self
        }
    };
}

pub mod datastructures;
pub mod exact;
pub mod generator;
pub mod graph;
pub mod io;
#[cfg(feature = "pace-logging")]
pub mod log;
pub mod lowerbound;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;
pub mod solver;
pub mod timeout;
pub mod vertex_cover;
