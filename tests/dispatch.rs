use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{Router, extract::State, http::Uri};
use eyre::Result;
use tokio::{
    net::TcpListener,
    time::{sleep, timeout},
};

use fanpanel::hardware::fan_sim::{Command, FanSim, TempLevel};

/* == Capture server == */

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn paths(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    async fn wait_for(&self, count: usize) -> Result<()> {
        timeout(Duration::from_secs(5), async {
            while self.0.lock().unwrap().len() < count {
                sleep(Duration::from_millis(10)).await;
            }
        })
        .await?;

        Ok(())
    }
}

async fn record(State(recorder): State<Recorder>, uri: Uri) -> &'static str {
    recorder.0.lock().unwrap().push(uri.path().to_owned());
    "OK"
}

async fn start_simulator() -> Result<(FanSim, Recorder)> {
    let recorder = Recorder::default();
    let app = Router::new().fallback(record).with_state(recorder.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((FanSim::new(addr.ip(), addr.port()), recorder))
}

/* == Scenarios == */

#[tokio::test]
async fn test_power_commands() -> Result<()> {
    let (fan, recorder) = start_simulator().await?;

    fan.execute(Command::SetPowered(true)).await?;
    assert_eq!(recorder.paths(), ["/fan/on"]);

    recorder.clear();

    fan.execute(Command::SetPowered(false)).await?;
    assert_eq!(recorder.paths(), ["/fan/off"]);

    Ok(())
}

#[tokio::test]
async fn test_temperature_pairs() -> Result<()> {
    let (fan, recorder) = start_simulator().await?;

    for (level, expected) in [
        (0, ["/temp/0", "/fan/speed/0"]),
        (7, ["/temp/7", "/fan/speed/70"]),
        (15, ["/temp/15", "/fan/speed/150"]),
    ] {
        recorder.clear();

        fan.execute(Command::SetTemperature(TempLevel::new(level)?))
            .await?;

        assert_eq!(recorder.paths(), expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_raw_speed() -> Result<()> {
    let (fan, recorder) = start_simulator().await?;

    fan.execute(Command::SetFanSpeed(42)).await?;
    assert_eq!(recorder.paths(), ["/fan/speed/42"]);

    Ok(())
}

#[tokio::test]
async fn test_detached_dispatch() -> Result<()> {
    let (fan, recorder) = start_simulator().await?;

    fan.dispatch(Command::SetTemperature(TempLevel::new(7)?));

    recorder.wait_for(2).await?;
    assert_eq!(recorder.paths(), ["/temp/7", "/fan/speed/70"]);

    Ok(())
}

#[tokio::test]
async fn test_unreachable_simulator() -> Result<()> {
    // Grab a port with nothing behind it.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let fan = FanSim::new(addr.ip(), addr.port());

    // The awaited path surfaces the transport error.
    assert!(fan.execute(Command::SetPowered(true)).await.is_err());

    // The detached path swallows it.
    fan.dispatch(Command::SetPowered(true));
    sleep(Duration::from_millis(100)).await;

    Ok(())
}
