mod home;
pub use home::Home;

mod device_remote;
pub use device_remote::{device_id_from_params, device_id_label, DeviceRemotePage};
