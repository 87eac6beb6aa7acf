//! Segment dispatch table.

use super::{
    credit_institution, distressed, enterprise, mdb, mortgage, public_body, retail, sovereign,
    Resolution, Resolver, Rule, RuleContext,
};
use crate::core::exposure::Exposure;
use crate::core::segment::Segment;
use crate::core::weight::RiskWeight;

fn resolve_other(exposure: &Exposure, _ctx: &RuleContext<'_>) -> Resolution {
    Resolution::new(
        RiskWeight::Hundred,
        Rule::UnrecognizedSegment {
            label: exposure.segment().label().to_string(),
        },
    )
}

/// The resolver registered for a segment. Total over [`Segment`].
pub fn resolver_for(segment: &Segment) -> Resolver {
    match segment {
        Segment::Sovereign => sovereign::resolve,
        Segment::PublicBody => public_body::resolve,
        Segment::MultilateralDevelopmentBank => mdb::resolve,
        Segment::CreditInstitution => credit_institution::resolve,
        Segment::Enterprise => enterprise::resolve,
        Segment::MicroEnterprise => retail::resolve_micro_enterprise,
        Segment::Individual => retail::resolve_individual,
        Segment::MortgageLoan => mortgage::resolve,
        Segment::DistressedDebt => distressed::resolve,
        Segment::Other(_) => resolve_other,
    }
}

/// Resolve the weight of one exposure.
///
/// With `distressed_flag_overrides_segment` set, a flagged exposure goes to
/// the distressed-debt rule whatever its declared segment.
pub fn dispatch(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    let resolver = if ctx.config.distressed_flag_overrides_segment && exposure.flags().distressed
    {
        distressed::resolve as Resolver
    } else {
        resolver_for(exposure.segment())
    };
    resolver(exposure, ctx)
}
