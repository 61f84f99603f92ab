//! Blocking HID channel abstraction.
//!
//! Boards only ever talk to a [`HidChannel`]. The hidapi backed implementation is
//! [`HidapiChannel`]; tests substitute an in-memory channel.

use std::ffi::CString;
use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use tracing::info;

use crate::error::{BoardError, Result};

/// An exclusively owned, blocking, packet oriented connection to a device
pub trait HidChannel: Send {
    /// Send one output report. Returns the number of bytes written.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Receive one input report into `buf`. Returns the number of bytes read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// [`HidChannel`] over a hidapi device handle. The handle is closed on drop.
pub struct HidapiChannel {
    device: HidDevice,
    read_timeout: Option<Duration>,
}

impl HidapiChannel {
    /// Open the first device matching the vendor and product id
    pub fn open(vendor_id: u16, product_id: u16) -> Result<Self> {
        let id = format!("{vendor_id:04x}:{product_id:04x}");
        let device = HidApi::new()
            .and_then(|api| api.open(vendor_id, product_id))
            .map_err(|source| BoardError::DeviceOpen {
                target: id.clone(),
                source,
            })?;
        info!(device = %id, "opened hid device");
        Ok(Self::from_device(device))
    }

    /// Open a device by its platform specific path (eg. `/dev/hidraw3`)
    pub fn open_path(path: &str) -> Result<Self> {
        let cpath = CString::new(path).map_err(|_| {
            BoardError::InvalidArgument(format!("device path {path:?} contains a NUL byte"))
        })?;
        let device = HidApi::new()
            .and_then(|api| api.open_path(&cpath))
            .map_err(|source| BoardError::DeviceOpen {
                target: path.to_string(),
                source,
            })?;
        info!(device = path, "opened hid device");
        Ok(Self::from_device(device))
    }

    /// Wrap an already opened hidapi device
    pub fn from_device(device: HidDevice) -> Self {
        Self {
            device,
            read_timeout: None,
        }
    }

    /// Bound reads to `timeout`. `None` blocks until the device answers.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }
}

impl HidChannel for HidapiChannel {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(self.device.write(data)?)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let len = match self.read_timeout {
            Some(timeout) => {
                let millis = timeout.as_millis().min(i32::MAX as u128) as i32;
                self.device.read_timeout(buf, millis)?
            },
            None => self.device.read(buf)?,
        };
        Ok(len)
    }
}
