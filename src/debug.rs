use std::time::Instant;

use log::debug;

pub struct Timing {
    start: Instant,
    msg: String,
}

impl Timing {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            msg: msg.into(),
        }
    }
}

impl Drop for Timing {
    #[inline]
    fn drop(&mut self) {
        let elapsed = Instant::now().duration_since(self.start);
        debug!("[{:?}] {}", elapsed, self.msg)
    }
}

#[cfg(feature = "render")]
macro_rules! TIME {
    () => {
        let _x = $crate::debug::Timing::new("TIME!");
    };
    ($msg: expr) => {
        let _x = $crate::debug::Timing::new($msg);
    };
}
#[cfg(feature = "render")]
pub(crate) use TIME;
