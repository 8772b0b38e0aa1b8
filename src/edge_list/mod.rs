macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}
pub(crate) use raise_error_unless;

pub mod instance_reader;
pub mod instance_writer;

pub use instance_reader::EdgeListReader;
pub use instance_writer::edge_list_writer;

pub type Result<T> = std::io::Result<T>;
