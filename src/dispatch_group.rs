/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::color_group::Rgb8;
use crate::convolve_3x3::convolve_work_unit;
use crate::{ImageSize, Kernel, SharpenError, WorkUnit};
use log::trace;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Hands every unit its own exclusive slice of `destination`, in unit order.
pub(crate) fn split_destination<'a>(
    destination: &'a mut [Rgb8],
    units: &[WorkUnit],
) -> Result<Vec<(WorkUnit, &'a mut [Rgb8])>, SharpenError> {
    let mut rest = destination;
    let mut offset = 0usize;
    let mut jobs = Vec::with_capacity(units.len());
    for &unit in units {
        if unit.start != offset || unit.size > rest.len() {
            return Err(SharpenError::IndexOutOfBounds);
        }
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(unit.size);
        jobs.push((unit, head));
        rest = tail;
        offset = unit.end();
    }
    Ok(jobs)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Runs one worker body, turning a panic into [`SharpenError::WorkerFailure`].
pub(crate) fn run_guarded<F>(worker: F) -> Result<(), SharpenError>
where
    F: FnOnce() -> Result<(), SharpenError>,
{
    catch_unwind(AssertUnwindSafe(worker))
        .map_err(|payload| SharpenError::WorkerFailure(panic_message(payload)))?
}

/// Fork-join over `jobs`: one task per unit, all joined before return.
///
/// On the first failing unit the remaining ones are skipped, tasks already
/// running are still waited for.
pub(crate) fn dispatch_units<F>(
    jobs: Vec<(WorkUnit, &mut [Rgb8])>,
    pool: &Option<ThreadPool>,
    body: F,
) -> Result<(), SharpenError>
where
    F: Fn(WorkUnit, &mut [Rgb8]) -> Result<(), SharpenError> + Send + Sync,
{
    let process_unit = |(unit, dst): (WorkUnit, &mut [Rgb8])| {
        trace!("Filtering pixels [{}, {})", unit.start, unit.end());
        run_guarded(|| body(unit, dst))
    };

    match pool {
        Some(pool) => pool.install(|| {
            jobs.into_par_iter()
                .with_max_len(1)
                .try_for_each(process_unit)
        }),
        None => jobs.into_iter().try_for_each(process_unit),
    }
}

/// Convolves every unit of `destination` with `kernel`.
///
/// The destination must be treated as invalid whenever an error is returned.
pub(crate) fn convolve_dispatch_u8(
    source: &[Rgb8],
    size: ImageSize,
    kernel: &Kernel,
    units: &[WorkUnit],
    destination: &mut [Rgb8],
    pool: &Option<ThreadPool>,
) -> Result<(), SharpenError> {
    let jobs = split_destination(destination, units)?;
    dispatch_units(jobs, pool, |unit, dst| {
        convolve_work_unit(source, size, kernel, unit, dst)
    })
}
