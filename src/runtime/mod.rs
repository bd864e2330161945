use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{ClientConfig, HttpClient};
use crate::model::Request;
use crate::output::chart::ChartWriter;
use crate::output::log_file::LogWriter;
use crate::output::{ChartSink, LogSink, Outputter};


const LOG_GENERATED: &str = "- Log file generated successfully.";
const CHART_GENERATED: &str = "- Chart generated successfully.";
const CHART_NEEDS_REPETITIONS: &str =
    "please: chart generation error: there must be at least 2 repetitions.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub emit_log: bool,
    pub emit_chart: bool,
}

/// What a completed run leaves behind once every record has been consumed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Response time of every attempt, in attempt order.
    pub latencies: Vec<u64>,
    pub chart: Option<PathBuf>,
}

pub struct Runtime<'a> {
    client: Box<dyn HttpClient>,
    outputter: &'a mut dyn Outputter,
    log_sink: Box<dyn LogSink>,
    chart_sink: Box<dyn ChartSink>,
}

impl<'a> Runtime<'a> {
    /// A runtime talking through reqwest that writes logs and charts under
    /// `output_dir`.
    pub fn new(
        outputter: &'a mut dyn Outputter,
        config: ClientConfig,
        output_dir: &Path,
    ) -> Result<Runtime<'a>, Error> {
        let client = Box::new(ReqwestHttpClient::create(config)?);

        Ok(Runtime::with_components(
            client,
            outputter,
            Box::new(LogWriter::new(output_dir)),
            Box::new(ChartWriter::new(output_dir)),
        ))
    }

    pub fn with_components(
        client: Box<dyn HttpClient>,
        outputter: &'a mut dyn Outputter,
        log_sink: Box<dyn LogSink>,
        chart_sink: Box<dyn ChartSink>,
    ) -> Runtime<'a> {
        Runtime {
            client,
            outputter,
            log_sink,
            chart_sink,
        }
    }

    /// Sends `request` `repetitions` times, one after another.
    ///
    /// The first failed round-trip ends the run with that error: later
    /// attempts are not made and no chart is drawn. Log and chart failures
    /// are reported through the outputter and never fail the run.
    pub fn run(
        &mut self,
        request: &Request,
        repetitions: usize,
        options: RunOptions,
    ) -> Result<RunReport, Error> {
        if repetitions < 1 {
            return Err(Error::usage("the request must be repeated at least once"));
        }

        let draw_chart = options.emit_chart && repetitions >= 2;
        if options.emit_chart && !draw_chart {
            self.diagnostic(CHART_NEEDS_REPETITIONS);
        }

        log::info!(
            "running {} {} {} time(s)",
            request.method,
            request.url,
            repetitions
        );

        let mut report = RunReport {
            latencies: Vec::with_capacity(repetitions),
            chart: None,
        };

        for attempt in 1..=repetitions {
            let record = self.client.execute(request).map_err(|err| {
                log::debug!("attempt {}/{} failed: {}", attempt, repetitions, err);
                err
            })?;

            report.latencies.push(record.response_time_ms);

            if let Err(err) = self.outputter.result(&record) {
                log::warn!("could not print result of attempt {}: {}", attempt, err);
            }

            if options.emit_log {
                match self.log_sink.write(request, &record, repetitions, attempt) {
                    Ok(written) if written > 0 => self.notice(LOG_GENERATED),
                    Ok(_) => {}
                    Err(err) => self.diagnostic(&format!("please: {}", err)),
                }
            }
        }

        if draw_chart {
            match self.chart_sink.render(&report.latencies, repetitions) {
                Ok(path) => {
                    self.notice(CHART_GENERATED);
                    report.chart = Some(path);
                }
                Err(err) => self.diagnostic(&format!("please: {}", err)),
            }
        }

        log::info!("finished {} {}", request.method, request.url);

        Ok(report)
    }

    fn notice(&mut self, message: &str) {
        if let Err(err) = self.outputter.notice(message) {
            log::warn!("could not print notice: {}", err);
        }
    }

    fn diagnostic(&mut self, message: &str) {
        if let Err(err) = self.outputter.diagnostic(message) {
            log::warn!("could not print diagnostic: {}", err);
        }
    }
}
