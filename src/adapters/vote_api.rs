pub mod http_vote_gateway;
