//! [`EnvShape`](crate::EnvShape) implementations for foreign types.

// bool, i8 - i128, u8 - u128, isize, usize, f32, f64
mod native;

// String, Option<T>, Box<T>, Vec<T>, VecDeque<T>, BTreeMap<K, V>
mod alloc;

// [T; N]
mod array;

// char, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr
mod opaque;

// Dynamic
mod dynamic;

// HashMap<K, V, S>, PathBuf
#[cfg(feature = "std")]
mod std;

pub use dynamic::Dynamic;
