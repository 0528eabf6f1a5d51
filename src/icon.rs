#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: &'static str,
    pub size: u32,
}

pub const ICON_SPECS: [IconSpec; 3] = [
    IconSpec::new("icon16.png", 16),
    IconSpec::new("icon48.png", 48),
    IconSpec::new("icon128.png", 128),
];

// both corners inclusive
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Rect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    pub margin: u32,
    pub line_width: u32,
    pub links: [Rect; 2],
}

impl IconSpec {
    pub const fn new(filename: &'static str, size: u32) -> Self {
        Self { filename, size }
    }

    pub fn layout(&self) -> Layout {
        let size = self.size;
        let margin = size / 8;
        let line_width = (size / 16).max(1);

        let top = size / 3;
        // u64 keeps size * 2 in range
        let bottom = (u64::from(size) * 2 / 3) as u32;

        let left = Rect::new(margin, top, size / 2 - margin / 2, bottom);
        let right = Rect::new(size / 2 + margin / 2, top, size - margin, bottom);

        Layout {
            margin,
            line_width,
            links: [left, right],
        }
    }
}
