use crate::dns::records::to_hickory_record;
use crate::dns::RecordTypeMapper;
use gyip_application::use_cases::ResolveQueryUseCase;
use gyip_domain::{DnsRequest, DomainError};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Joins the raw label bytes so literals like `::1` survive unescaped.
    fn query_domain(name: &Name) -> String {
        name.iter()
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let queries = request.queries();
        if queries.is_empty() {
            debug!("Request without questions");
            return send_error_response(request, &mut response_handle, ResponseCode::FormErr).await;
        }

        let client_ip = request.src().ip().to_canonical();
        let mut questions = Vec::with_capacity(queries.len());
        // a served non-address question still makes the reply authoritative
        let mut served_other = false;

        for query in queries {
            let domain = Self::query_domain(query.original().name());
            let hickory_record_type = query.query_type();

            info!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "DNS query received");

            match RecordTypeMapper::from_hickory(hickory_record_type) {
                Some(record_type) => questions
                    .push(DnsRequest::new(domain.as_str(), record_type).with_client(client_ip)),
                None => {
                    debug!(domain = %domain, record_type = ?hickory_record_type, "Not an address question");
                    served_other |= self.use_case.is_served(&domain);
                }
            }
        }

        let records = match self.use_case.answer_questions(&questions) {
            Ok(records) => records,
            Err(DomainError::NotAuthoritative(_)) if served_other => Vec::new(),
            Err(DomainError::NotAuthoritative(names)) => {
                debug!(names = %names, "Names outside served zones");
                return send_error_response(request, &mut response_handle, ResponseCode::NotZone)
                    .await;
            }
            Err(e) => {
                error!(error = %e, "Query resolution failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        if records.is_empty() {
            debug!(questions = queries.len(), "No address in query names");
            return send_error_response(request, &mut response_handle, ResponseCode::NXDomain)
                .await;
        }

        let answers = match records.iter().map(to_hickory_record).collect::<Result<Vec<Record>, _>>() {
            Ok(answers) => answers,
            Err(e) => {
                error!(error = %e, "Failed to build answer records");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        debug!(answers = answers.len(), ttl = records[0].ttl, "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = authoritative_header(request, ResponseCode::NoError);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

fn authoritative_header(request: &Request, code: ResponseCode) -> Header {
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_response_code(code);
    header
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending empty response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let header = authoritative_header(request, code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
