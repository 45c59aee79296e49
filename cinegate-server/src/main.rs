// Copyright 2025 Cinegate Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use cinegate_core::GatewayConfig;
use std::path::PathBuf;

/// MCP server bridging the cinema booking API over stdio.
#[derive(Parser, Debug)]
#[command(name = "cinegate", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the upstream base URL.
    #[arg(long, env = "CINEGATE_BASE_URL")]
    base_url: Option<String>,

    /// Override the per-request timeout in seconds.
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinegate_server::init_tracing();

    let args = Args::parse();
    let mut config = GatewayConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = args.request_timeout {
        config.request_timeout_secs = timeout;
    }

    cinegate_server::run_server(config).await
}
