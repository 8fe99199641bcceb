//! Stand-ins for exiftool and an image host, shared by
//! the module tests.

use std::{
    fs,
    io::{Read, Write},
    net::TcpListener,
    path::{Path, PathBuf},
    thread,
};

use anyhow::Result;

/// Shell script answering like `exiftool -c %.6f`:
///
/// - echoes its arguments on an `Args :` line;
/// - on `-`, prints stdin as the GPS position;
/// - exits 1 for any path ending in `bad.jpg`;
/// - otherwise prints a fixed GPS position.
#[cfg(unix)]
pub fn fake_exiftool(dir: &Path) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("exiftool");
    fs::write(
        &script,
        r#"#!/bin/sh
echo "Args : $*"
if [ "$3" = "-" ]; then
    body=$(cat)
    echo "GPS Position : $body"
    exit 0
fi
case "$4" in
    *bad.jpg) exit 1 ;;
esac
echo "GPS Latitude : 9.000000 N"
echo "GPS Position : 9.000000 N, 8.000000 E"
"#,
    )?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
    Ok(script)
}

/// Serve a single HTTP request on localhost, answering
/// with `status` and `body`. Returns the base URL.
pub fn serve_once(status: &'static str, body: &'static [u8]) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    thread::spawn(move || -> std::io::Result<()> {
        let (mut stream, _) = listener.accept()?;
        let mut request = vec![];
        let mut buf = [0; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf)?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )?;
        stream.write_all(body)
    });

    Ok(format!("http://{}", addr))
}
