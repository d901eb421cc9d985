//! Chunked file reader
//!
//! Pulls a reader dry in fixed-size reads and appends each chunk to a
//! bounded [`GrowableBuffer`].

use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::buffer::GrowableBuffer;
use crate::config::LoaderConfig;
use crate::error::{BufferError, ConfError, Result};

/// Read everything from `reader` into a buffer sized by `config`
///
/// `path` labels errors. Hitting the buffer cap is reported as
/// `FileTooLarge`, allocation failure as `OutOfMemory`. On error the
/// partially filled buffer is dropped before returning.
pub fn read_into_buffer<R: Read>(
    reader: &mut R,
    path: &Path,
    config: &LoaderConfig,
) -> Result<GrowableBuffer> {
    config.validate()?;

    let mut buffer = GrowableBuffer::new(config.block_size, config.max_size)
        .map_err(|e| buffer_error(e, path))?;
    let mut chunk = vec![0u8; config.read_chunk_size];
    let mut reads = 0usize;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ConfError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        buffer
            .append(&chunk[..n])
            .map_err(|e| buffer_error(e, path))?;
        reads += 1;
    }

    debug!(
        path = %path.display(),
        bytes = buffer.len(),
        capacity = buffer.capacity(),
        reads,
        "read configuration file"
    );

    Ok(buffer)
}

fn buffer_error(err: BufferError, path: &Path) -> ConfError {
    match err {
        BufferError::TooSmall { max, .. } => ConfError::FileTooLarge {
            path: path.to_path_buf(),
            max,
        },
        BufferError::AllocationFailure { .. } => ConfError::OutOfMemory {
            path: path.to_path_buf(),
        },
    }
}
