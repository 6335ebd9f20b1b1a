/// Host-adjustable rendering settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Subdivision along a shape's axis (face grid for the cube)
    pub shape_parameter_1: i32,
    /// Wedges around the axis of revolution
    pub shape_parameter_2: i32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Settings {
    pub fn with_shape_parameters(mut self, param1: i32, param2: i32) -> Self {
        self.shape_parameter_1 = param1;
        self.shape_parameter_2 = param2;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape_parameter_1: 8,
            shape_parameter_2: 12,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}
